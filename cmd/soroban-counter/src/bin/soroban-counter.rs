fn main() {
    soroban_counter::main();
}
