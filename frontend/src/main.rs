fn main() {
    #[cfg(target_arch = "wasm32")]
    avis_frontend::start();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("avis-frontend is a wasm application; build it with trunk for the browser.");
}
