/*!
# Statements

Several statements may share a line separated by `:`.
`LET` is optional; a line starting with a variable is an assignment.
`LOAD` and `SAVE` are accepted and do nothing in this build.
*/

#[path = "statements/bye.rs"]
#[allow(non_snake_case)]
pub mod BYE;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/mem.rs"]
#[allow(non_snake_case)]
pub mod MEM;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/poke.rs"]
#[allow(non_snake_case)]
pub mod POKE;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/rseed.rs"]
#[allow(non_snake_case)]
pub mod RSEED;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;
