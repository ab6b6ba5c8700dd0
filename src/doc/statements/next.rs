/*!
# `NEXT [<variable>]`
## Purpose
Closes a `FOR` loop.

## Remarks
The step is added to the variable. If the value has not passed the
limit, execution goes back to just after the matching `FOR`. Otherwise
the loop is dropped from the stack and execution continues after
`NEXT`. A step of 0 ends the loop at once.

Without a variable, the innermost loop is used. With one, the stack is
searched for that variable's loop and any loops above it are dropped.

`NEXT` with no matching `FOR` is a `How?` error.
*/
