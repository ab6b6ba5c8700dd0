mod common;
use common::*;
use tinybasic::mach::Script;

#[test]
fn test_precedence() {
    let mut r = runtime();
    let mut host = Script::new();
    assert_eq!(exec(&mut r, &mut host, &["PRINT 2+3*4"]), "14\n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT (2+3)*4"]), "20\n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT 7/2"]), "3\n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT -7/2"]), "-3\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = runtime();
    let mut host = Script::new();
    assert_eq!(exec(&mut r, &mut host, &["PRINT 7%0"]), "What? \n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT 1/0+1"]), "What? \n");
}

#[test]
fn test_relations_yield_one_or_zero() {
    let mut r = runtime();
    let mut host = Script::new();
    let out = exec(&mut r, &mut host, &["A=3", "PRINT A>2,A<2,A<>3,A!=4"]);
    assert_eq!(out, "1001\n");
}

#[test]
fn test_wraps_at_sixteen_bits() {
    let mut r = runtime();
    let mut host = Script::new();
    exec(&mut r, &mut host, &["A=32767+1", "B=300*300"]);
    assert_eq!(r.variable('A'), Some(-32768));
    assert_eq!(r.variable('B'), Some(300i16.wrapping_mul(300)));
}

#[test]
fn test_functions() {
    let mut r = runtime();
    let mut host = Script::new();
    assert_eq!(exec(&mut r, &mut host, &["PRINT ABS(-5)"]), "5\n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT AREAD(3)+DREAD(4)"]), "0\n");
    exec(&mut r, &mut host, &["R=RND(6)"]);
    let roll = r.variable('R').unwrap();
    assert!((0..6).contains(&roll));
    assert_eq!(exec(&mut r, &mut host, &["PRINT RND(0)"]), "What? \n");
    assert_eq!(exec(&mut r, &mut host, &["PRINT FOO(1)"]), "What? \n");
}

#[test]
fn test_syntax_error_marks_column() {
    let mut r = runtime();
    let mut host = Script::new();
    let out = exec(&mut r, &mut host, &["10 A=B C", "RUN"]);
    assert_eq!(out, "What? 10 A=B ^\n");
}

#[test]
fn test_error_column_after_relation() {
    let mut r = runtime();
    let mut host = Script::new();
    let out = exec(&mut r, &mut host, &["10 PRINT 1/0=1", "RUN"]);
    assert_eq!(out, "What? 10 PRINT 1/0=1\n");
}
