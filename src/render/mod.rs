/*!
## Rust Render Module

Turns a token stream into marked-up text. Renderers never look at the
source again; everything they need is in the tokens.

*/

pub mod ansi;
pub mod html;
