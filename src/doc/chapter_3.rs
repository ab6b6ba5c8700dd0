/*!
# Functions

Each function takes one expression in parentheses.

| Function | Result |
|-|-|
| `ABS(x)` | Absolute value. `ABS(-32768)` stays -32768. |
| `RND(n)` | Pseudorandom integer from 0 up to but not including `n`. A negative `n` uses its magnitude. `RND(0)` is an error. |
| `PEEK(a)` | Byte `a` of program memory. Outside of memory is an error. |
| `AREAD(p)` | Analog pin `p`. Always 0 on this host. |
| `DREAD(p)` | Digital pin `p`. Always 0 on this host. |

The generator starts from the same seed at every cold start, so a
program that never uses `RSEED` sees the same sequence each run.

```text
10 RSEED 42
20 FOR I=1 TO 3
30 PRINT RND(6)+1
40 NEXT I
```

*/
