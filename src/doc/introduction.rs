/*!
# Introductory Tutorial for TinyBasic Plus

Run the executable in a terminal. It greets you with the version and the
amount of program memory that is free, then waits at the `>` prompt.
Type CTRL-D to leave, or `BYE`.
<pre><code>&nbsp;  TinyBasic Plus v1.0.0
&nbsp;  19354 bytes free.
&nbsp;  OK
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C. It prints `break!` and returns to
the prompt with the program and variables intact.

A line typed without a number runs immediately. This is direct mode.

<pre><code>&nbsp;> print 2+3*4
&nbsp;  14
</code></pre>

A line that starts with a number between 1 and 65534 is stored instead.
Lines are kept in numeric order no matter what order they are typed in.
Typing a number that already exists replaces that line, and typing a
number alone deletes it.

<pre><code>&nbsp;> 20 print "world"
&nbsp;> 10 print "hello"
&nbsp;> list
&nbsp;  10 PRINT "hello"
&nbsp;  20 PRINT "world"
&nbsp;  OK
&nbsp;> run
&nbsp;  hello
&nbsp;  world
&nbsp;  OK
</code></pre>

Everything outside of quotes is converted to upper case as it is typed.
There are 26 variables, `A` to `Z`, each a 16-bit signed integer.
Arithmetic wraps around at 32767 just as it does on small
microcontrollers.

Memory is one fixed block. Program lines, variables and the `FOR`/`GOSUB`
stack all share it, so `MEM` reports what is left for more lines.

*/
