/*!
# `MEM`
## Purpose
Prints how many bytes are free for program lines.
*/
