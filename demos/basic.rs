use planets::config::SceneConfig;
use planets::renderer::Renderer;

fn main() {
    // Default scene: three free planets in a 1024x768 window
    let config = SceneConfig::default();

    // Start the renderer
    let renderer = Renderer::new(config.simulator(), config.world());
    if let Err(e) = renderer.create_window() {
        eprintln!("{e}");
    }
}
