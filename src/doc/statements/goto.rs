/*!
# `GOTO <expression>`
## Purpose
Continues execution at the given line, or the first line after it.

## Remarks
A target past the last line ends the program. A bad expression is a
`How?` error.
*/
