/*!
# `PRINT [list]` or `? [list]`
## Purpose
Prints numbers and quoted strings.

## Remarks
Strings may be quoted with `"` or `'`. Items separated by `,` are printed
with nothing between them. A `;` at the end of the list suppresses the
line ending. `PRINT` alone prints a blank line.

## Example
```text
PRINT "A";"B"
AB
PRINT "A","B"
AB
```
*/
