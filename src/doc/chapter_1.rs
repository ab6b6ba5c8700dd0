/*!
# Expressions

Every value is a 16-bit signed integer. Overflow wraps.

| Precedence | Operators | Meaning |
|-|-|-|
| 1 | `-` | Negation |
| 2 | `*` `/` `%` | Multiply, divide toward zero, remainder |
| 3 | `+` `-` | Add, subtract |
| 4 | `=` `<>` `!=` `<` `<=` `>` `>=` | Compare, yielding 1 or 0 |

Only one comparison is allowed per expression. Both sides are always
evaluated. Parentheses group as usual.

A variable is a single letter that is not followed by another letter.
Two or more letters in a row name a function, listed in chapter 3.

Dividing by zero is an error, reported once the whole expression has
been scanned:

```text
>PRINT 7%0
What?
```

*/
