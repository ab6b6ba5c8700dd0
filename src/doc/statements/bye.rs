/*!
# `BYE`
## Purpose
Ends the session.
*/
