use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json;

use crate::err::Error;
use crate::msgs::Command;

#[derive(Clone, Debug, Serialize)]
pub struct LogMessage {
    pub tag: &'static str,
    pub data: Command,
}

pub trait LogBackend {
    fn write(&mut self, msg: &LogMessage);
}

#[derive(Debug)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> ConsoleLogger {
        ConsoleLogger {}
    }
}

impl LogBackend for ConsoleLogger {
    fn write(&mut self, msg: &LogMessage) {
        println!("{}, {:?}", msg.tag, msg.data);
    }
}

#[derive(Debug)]
pub struct FileLogger {
    file: fs::File,
}

impl FileLogger {
    pub fn new() -> Result<FileLogger, Error> {
        let file = fs::File::create(unique_filename("tala.log"))?;
        Ok(FileLogger { file: file })
    }
}

fn unique_filename(pattern: &str) -> OsString {
    let mut i = 1;
    let mut buff = PathBuf::from(pattern);

    loop {
        let tbuf = buff.clone();
        let filepath = Path::new(&tbuf);
        if !filepath.exists() {
            return buff.into_os_string();
        }

        let orig = Path::new(pattern);
        let stem = orig.file_stem().unwrap().to_str().unwrap();
        let ext = orig.extension().unwrap().to_str().unwrap();
        buff.set_file_name(format!("{}-{}.{}", stem, i, ext));
        i += 1;
    }
}

impl LogBackend for FileLogger {
    fn write(&mut self, msg: &LogMessage) {
        let s = serde_json::to_string(msg).unwrap() + "\n";
        self.file.write_all(s.as_bytes()).unwrap();
    }
}

pub struct Logger {
    backend: Box<dyn LogBackend>,
}

impl Logger {
    pub fn new(backend: Box<dyn LogBackend>) -> Logger {
        Logger { backend: backend }
    }

    pub fn log(&mut self, tag: &'static str, msg: &Command) {
        let msg = LogMessage {
            tag: tag,
            data: msg.clone(),
        };
        self.backend.write(&msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::msgs::Beat;

    struct MemoryLogger {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl LogBackend for MemoryLogger {
        fn write(&mut self, msg: &LogMessage) {
            let line = serde_json::to_string(msg).unwrap();
            self.lines.borrow_mut().push(line);
        }
    }

    #[test]
    fn test_log_lines_are_json() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let backend = MemoryLogger {
            lines: Rc::clone(&lines),
        };
        let mut logger = Logger::new(Box::new(backend));

        logger.log("machine", &Command::Pulse(Beat { step: 0, pulse: 1 }));

        let lines = lines.borrow();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["tag"], "machine");
        assert_eq!(value["data"]["Pulse"]["pulse"], 1);
    }

    #[test]
    fn test_console_logger() {
        let mut logger = Logger::new(Box::new(ConsoleLogger::new()));
        logger.log("machine", &Command::Pulse(Beat { step: 1, pulse: 0 }));
    }
}
