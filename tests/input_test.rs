mod common;
use common::*;
use tinybasic::mach::Script;

#[test]
fn test_input() {
    let mut r = runtime();
    let mut host = Script::new();
    host.type_line("42");
    let out = exec(&mut r, &mut host, &["INPUT A:PRINT A*2"]);
    assert_eq!(out, "?84\n");
    assert_eq!(r.variable('A'), Some(42));
}

#[test]
fn test_input_takes_expression() {
    let mut r = runtime();
    let mut host = Script::new();
    host.type_line("b*3");
    exec(&mut r, &mut host, &["B=5", "INPUT C"]);
    assert_eq!(r.variable('C'), Some(15));
}

#[test]
fn test_input_reprompts() {
    let mut r = runtime();
    let mut host = Script::new();
    host.type_line("X+");
    host.type_line("7");
    let out = exec(&mut r, &mut host, &["INPUT A:PRINT A"]);
    assert_eq!(out, "??7\n");
}

#[test]
fn test_input_in_program() {
    let mut r = runtime();
    let mut host = Script::new();
    host.type_line("1");
    host.type_line("2");
    let out = exec(
        &mut r,
        &mut host,
        &["10 INPUT A", "20 INPUT B", "30 PRINT A+B", "RUN"],
    );
    assert_eq!(out, "??3\n");
}

#[test]
fn test_input_needs_variable() {
    let mut r = runtime();
    let mut host = Script::new();
    assert_eq!(exec(&mut r, &mut host, &["INPUT 5"]), "What? \n");
}

#[test]
fn test_break() {
    let mut r = runtime();
    let mut host = Script::new();
    exec(&mut r, &mut host, &["10 A=A+1", "20 GOTO 10"]);
    host.type_break();
    let out = exec(&mut r, &mut host, &["RUN"]);
    assert_eq!(out, "break!\n");
    assert_eq!(r.program().lines().count(), 2);
}
