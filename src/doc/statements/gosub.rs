/*!
# `GOSUB <expression>`
## Purpose
Calls a subroutine starting at the given line.

## Remarks
If the line does not exist, execution continues at the next line
after it. Pair with `RETURN`. Each call uses 5 bytes of stack.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "SUB"
110 RETURN
RUN
SUB
BACK
OK
```
*/
