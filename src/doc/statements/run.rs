/*!
# `RUN`
## Purpose
Clears the control stack and runs the program from its first line.
Variables keep their values.
*/
