/*!
# `NEW`
## Purpose
Erases the program and the control stack. Variables are kept.
*/
