/*!
# Memory

All state lives in one buffer of `--ram-size` bytes, 19456 by default.

```text
0            program end      variables        stack limit        top
| line records | free         | A..Z, 2 bytes each | (unused)  | frames |
```

A stored line takes its text plus four bytes: two for the number, one
for the length and one for the end marker. No line may take more than
255 bytes. Lines being typed are edited in the free space just above the
program.

The control stack holds `FOR` frames of 10 bytes and `GOSUB` frames of
5 bytes. Its capacity is `--stack-frames` `FOR` frames, 5 by default.
Overflowing it prints `Sorry!`.

A `GOTO` out of a `FOR` loop leaves the loop's frame on the stack.
It stays there until a `NEXT` for the same variable finds it, or until
`RUN` or `NEW` clears the stack.

*/
