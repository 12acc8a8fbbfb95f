mod console;
mod null;
mod osc;
mod sink;
mod udp;

use std::convert::From;

use crate::err::{Error, SysErr};

pub use self::console::Console;
pub use self::null::Null;
pub use self::sink::{CompositeSink, Sink};
pub use self::udp::Udp;

const UDP_HOST_ADDR: &'static str = "127.0.0.1:34254";
const UDP_CLIENT_ADDR: &'static str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq)]
pub enum Backend {
    Console,
    Null,
    Udp(String, String),
}

impl Backend {
    pub fn from_name(name: &str) -> Result<Backend, Error> {
        match name {
            "console" | "" => Ok(Backend::Console),
            "null" => Ok(Backend::Null),
            "udp" => Ok(Backend::Udp(
                String::from(UDP_HOST_ADDR),
                String::from(UDP_CLIENT_ADDR),
            )),
            _ => Err(From::from(SysErr::UnknownSink)),
        }
    }
}

pub fn factory(request: &Backend) -> Result<Box<dyn Sink>, Error> {
    match *request {
        Backend::Console => Ok(Box::new(Console::new())),
        Backend::Null => Ok(Box::new(Null::new())),
        Backend::Udp(ref host, ref client) => Ok(Box::new(Udp::new(host, client)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::from_name(""), Ok(Backend::Console));
        assert_eq!(Backend::from_name("console"), Ok(Backend::Console));
        assert_eq!(Backend::from_name("null"), Ok(Backend::Null));
        assert!(Backend::from_name("udp").is_ok());
        assert_eq!(
            Backend::from_name("jack"),
            Err(Error::SysErr(SysErr::UnknownSink))
        );
    }

    #[test]
    fn test_composite_names() {
        let sinks: Vec<Box<dyn Sink>> =
            vec![Box::new(Console::new()), Box::new(Null::new())];
        let sink = CompositeSink::new(sinks);
        assert_eq!(sink.name(), "console, null");
    }
}
