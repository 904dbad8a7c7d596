fn main() {
    sbhl::term::main();
}
