/*!
# `LIST [<line number>]`
## Purpose
Prints the stored program, starting at the given line if there is one.
*/
