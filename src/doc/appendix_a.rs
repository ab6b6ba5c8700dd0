/*!
# Errors

TinyBasic Plus has three error messages.

| Message | Meaning |
|-|-|
| `What?` | The statement could not be understood, or an expression failed. |
| `How?` | The statement made sense but could not be done, like `RETURN` without `GOSUB`. |
| `Sorry!` | Out of memory. The line does not fit or the stack is full. |

When `What?` happens inside a stored line, the line is printed with a
`^` in place of the character where the problem was found.

```text
>10 A=B C
>RUN
What? 10 A=B ^
```

After `What?` and `How?` the interpreter goes back to the prompt and any
open `FOR` or `GOSUB` stays on the stack. After `Sorry!` or a break, the
stack is cleared and `OK` is printed.

*/
