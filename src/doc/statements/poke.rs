/*!
# `POKE <address>,<value>`
## Purpose
Writes a byte to hardware on a microcontroller.

## Remarks
Both expressions are evaluated but nothing is written on this host.
*/
