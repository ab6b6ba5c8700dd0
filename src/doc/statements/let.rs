/*!
# `[LET] <variable>=<expression>`
## Purpose
Assigns a value to a variable.

## Example
```text
LET A=10
B=A*3
PRINT B
30
```
*/
