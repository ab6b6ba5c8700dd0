/*!
# `INPUT <variable>`
## Purpose
Prompts with `?` and stores the expression typed in reply.

## Remarks
The reply is a full expression, so `A*2` is accepted. A reply that
cannot be evaluated prompts again.
*/
