/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
x, y and z are each evaluated once, in that order, before the variable
is assigned. The step defaults to 1.

The first iteration always executes even if starting past the end.

The loop is remembered on the control stack. Leaving it with `GOTO`
leaves that entry behind.

## Example
```text
10 FOR I=3 TO 1 STEP -1
20 PRINT I
30 NEXT I
RUN
3
2
1
OK
```
*/
