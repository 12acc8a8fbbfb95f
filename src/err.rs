use std::convert::From;
use std::error;
use std::fmt;
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum RuntimeErr {
    InvalidSteps(i64),
}

impl error::Error for RuntimeErr {}

impl fmt::Display for RuntimeErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RuntimeErr::InvalidSteps(steps) => {
                write!(f, "invalid step count '{}'", steps)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SysErr {
    UnknownSink,
}

impl error::Error for SysErr {}

impl fmt::Display for SysErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SysErr::UnknownSink => write!(f, "unknown sink"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Error {
    RuntimeErr(RuntimeErr),
    SysErr(SysErr),
    IoErr,
}

impl From<RuntimeErr> for Error {
    fn from(err: RuntimeErr) -> Error {
        Error::RuntimeErr(err)
    }
}

impl From<SysErr> for Error {
    fn from(err: SysErr) -> Error {
        Error::SysErr(err)
    }
}

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Error {
        Error::IoErr
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::RuntimeErr(ref err) => Some(err),
            Error::SysErr(ref err) => Some(err),
            Error::IoErr => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::RuntimeErr(ref err) => write!(f, "Runtime error {}", err),
            Error::SysErr(ref err) => write!(f, "System error {}", err),
            Error::IoErr => write!(f, "IO error"),
        }
    }
}
