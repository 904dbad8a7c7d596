/*!
# Introduction to the SmileBASIC Highlighter

Run `sbhl` with one or more listings and they are printed back with
terminal colours. Use `-` to read a listing from stdin.

<pre><code>&nbsp;$ sbhl game.sb3
&nbsp;$ cat game.sb4 | sbhl --dialect sb4 -
</code></pre>

Run `sbhl` with no files and you get a prompt. Every line you type is
echoed back highlighted. TAB completes keywords and built-in functions
of the dialect you picked. Type CTRL-D to exit.

<pre><code>&nbsp;SB> print "Hello World"
&nbsp;print "Hello World"
</code></pre>

## Dialects

SmileBASIC changed between versions. Pick the dialect with `--dialect`:

| Tag          | Dialect |
|--------------|---------|
| `sb3`        | SmileBASIC 3 |
| `sb2`, `ptc` | Petit Computer, highlighted as SmileBASIC 3 |
| `sb4`        | SmileBASIC 4 |
| none         | Unspecified |

Unspecified is not a guess at either version. Words that only one version
reserves are usually highlighted anyway, so a listing of unknown origin
still looks right. A few words are reserved in SmileBASIC 3 only and are
left alone: `STOP` became a function in SmileBASIC 4.

The backslash is the biggest difference. SmileBASIC 4 uses it to continue
a line, so everything after it on the line is skipped. Older versions do
not, and it is shown as an ordinary character.

## HTML

`--format html` writes the listing as HTML. Each run of tokens with the
same display class is wrapped in a `<span class="...">`. The classes are
listed in [Appendix A](../___Appendix_A/index.html).

*/
