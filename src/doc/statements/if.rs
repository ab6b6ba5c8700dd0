/*!
# `IF <expression> <statement>`
## Purpose
Runs the rest of the line only when the expression is not zero.

## Remarks
There is no `THEN`. When the expression is zero, execution moves to the
next stored line.

## Example
```text
10 A=5
20 IF A>3 PRINT "BIG": PRINT "STILL BIG"
30 IF A<3 PRINT "SMALL"
RUN
BIG
STILL BIG
OK
```
*/
