use leveled_log::{Logger, Severity};

fn dump(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer).into_owned()
}

#[test]
fn test_print() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Trace);
    logger.trace("print this message");
    assert!(dump(&buffer).contains("print this message"));
}

fn call(logger: &mut Logger<&mut Vec<u8>>, level: Severity, message: &str) {
    match level {
        Severity::Trace => logger.trace(message),
        Severity::Debug => logger.debug(message),
        Severity::Info => logger.info(message),
        Severity::Warn => logger.warn(message),
        Severity::Error => logger.error(message),
        Severity::Fatal => logger.fatal(message),
    }
}

#[test]
fn test_each_severity_at_its_own_threshold() {
    let cases = [
        (Severity::Trace, "some trace message"),
        (Severity::Debug, "some debug message"),
        (Severity::Info, "some info message"),
        (Severity::Warn, "some warn message"),
        (Severity::Error, "some error message"),
        (Severity::Fatal, "some fatal message"),
    ];

    for (level, message) in cases {
        let mut buffer = Vec::new();
        let mut logger = Logger::new(&mut buffer, level);
        call(&mut logger, level, message);
        drop(logger);
        let output = dump(&buffer);
        assert!(output.contains(message), "{level} message not found in:\n{output}");
        assert!(output.contains(&format!("[{level}]")), "tag missing in:\n{output}");
    }
}

#[test]
fn test_info_at_debug_threshold() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Debug);
    logger.info("some info message");
    assert!(dump(&buffer).contains("some info message"));
}

#[test]
fn test_raising_threshold_suppresses_each_lower_level() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Trace);

    logger.level = Severity::Debug;
    logger.trace("trace me!");
    logger.level = Severity::Info;
    logger.debug("debugging");
    logger.level = Severity::Warn;
    logger.info("some info");
    logger.level = Severity::Error;
    logger.warn("warning!");
    logger.level = Severity::Fatal;
    logger.error("some error");

    assert!(buffer.is_empty(), "expected empty; got {}", dump(&buffer));
}

#[test]
fn test_error_below_fatal_threshold() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Fatal);
    logger.error("some error");
    assert!(!dump(&buffer).contains("some error"));
}

#[test]
fn test_threshold_change_is_not_retroactive() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Trace);
    logger.trace("early trace");
    logger.level = Severity::Fatal;
    logger.trace("late trace");
    let output = dump(&buffer);
    assert!(output.contains("early trace"));
    assert!(!output.contains("late trace"));
}

#[test]
fn test_reserved_names_and_empty_messages_are_filtered_too() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Error);
    logger.warn("");
    logger.warn("FATAL");
    logger.info("[ERROR]");
    assert!(buffer.is_empty());
}

#[test]
fn test_default_line_layout() {
    let mut buffer = Vec::new();
    let mut logger = Logger::new(&mut buffer, Severity::Info);
    logger.info("layout check");
    let output = dump(&buffer);
    let (timestamp, rest) = output.split_once(' ').unwrap();
    assert_eq!(rest, "[INFO] layout check\n");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(), "bad timestamp {timestamp}");
    assert!(timestamp.ends_with('Z'));
}
