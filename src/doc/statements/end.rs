/*!
# `END` or `STOP`
## Purpose
Stops the program and returns to the prompt.

## Remarks
Nothing may follow on the same line. The two words are interchangeable.
`OK` is printed as with any normal stop.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
OK
```
*/
