/// Binary entrypoint for the `tspgen` executable.
///
/// Keeps the binary thin; all logic lives in `tspgen_lib` so tests can call
/// library functions directly.
fn main() {
    tspgen_lib::run();
}
