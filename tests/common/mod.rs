use tinybasic::mach::{Config, Runtime, Script};

pub fn runtime() -> Runtime {
    Runtime::new(Config {
        echo: false,
        ..Config::default()
    })
}

/// Enter each line in turn and return everything printed, less the
/// final `OK`.
pub fn exec(runtime: &mut Runtime, host: &mut Script, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(host, line).unwrap();
    }
    let s = host.take_output();
    s.strip_suffix("OK\n").unwrap_or(&s).to_string()
}
