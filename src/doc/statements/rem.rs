/*!
# `REM` or `'`
## Purpose
A remark. The rest of the line is ignored.
*/
