/*!
# Display Classes

These are the CSS classes written by `--format html`. Classes with two
words let a style sheet colour broadly (`.keyword`) or narrowly
(`.def.keyword`).

| Class | Used for |
|-------|----------|
| `keyword` | `IF`, `THEN`, `PRINT`, `T?` and other reserved words |
| `question keyword` | `?`, the shorthand for `PRINT` |
| `def keyword` | `DEF` |
| `name` | the name after `DEF` |
| `statement function` | built-in instructions and functions, `CLS`, `ABS(X)` |
| `statement` | calls of user defined functions |
| `to-step keyword` | `TO` and `STEP` in a `FOR` loop |
| `variable` | variables |
| `variable function` | system variables such as `MAINCNT` (not in SmileBASIC 4) |
| `number` | `10`, `1.5E-3`, `&HFF`, `&B1010` |
| `constant number` | `#UP`, `#TRUE` |
| `true-false number` | `TRUE`, `FALSE`, `CANCEL` |
| `string` | `"text"` |
| `label` | `@LOOP` where a label is defined |
| `label-string string` | `GOTO @LOOP`, where a label is used as a value |
| `operator` | `+`, `<=`, `&&`, `!` |
| `word-operator operator` | `AND`, `OR`, `XOR`, `NOT`, and `DIV`/`MOD` outside SmileBASIC 3 |
| `equals` | `=` |
| `comment` | `' text` |

Whitespace, punctuation and anything unrecognized are written without a
span.

## Functions and variables

SmileBASIC does not mark calls. `CLS` on a line by itself is an instruction
while `CLS=1` assigns a variable. The highlighter looks at what follows a
name: at the start of a statement a name is a call unless `=` or `[`
follows; inside an expression it is a call only when `(` follows.

An array written `A(1)` at the start of a statement is shown as a call.
Telling the two apart needs to know what was declared.

*/
