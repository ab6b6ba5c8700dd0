/*!
# `RETURN`
## Purpose
Returns from the latest `GOSUB`.

## Remarks
Any `FOR` loops opened inside the subroutine stay on the stack.
`RETURN` without `GOSUB` is a `How?` error.
*/
