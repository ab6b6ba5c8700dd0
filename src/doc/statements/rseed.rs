/*!
# `RSEED <expression>`
## Purpose
Restarts the random number generator from a seed.
*/
