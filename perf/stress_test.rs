/// This executable parses and lays out a very large number of formulas
/// Its performance is monitored with `perf` to find out the main
/// cost centers of the `parser` and `layout` modules
///
/// Takes path to a .json file representing a list of strings (as below)
/// and renders each of them with zero font metrics ; prints number of successes
///
/// ```json
/// [
///   "",
///   "$x_i^2$",
///   "area $\\pi r^2$ of a disk",
///   "$\\sum_{i=0}^{n} \\hat{x}_i \\over{a}{b}$",
///   ...
///  ]
///  ```
///
///
/// Run with:
///
/// ```bash
/// CARGO_PROFILE_RELEASE_DEBUG=true cargo flamegraph --root --example stress-test -- PATH_TO_FILE
/// ```

use mathtext::font::FontDescription;
use mathtext::render::{DummyFactory, OutputKind};
use mathtext::render::driver::MathTextRenderer;


fn main() {
	env_logger::init();
	let mut n_successes = 0;
	let mut n_renders   = 0;

	let formulas_file_path = std::env::args().nth(1).expect("Usage: stress-test PATH");
	eprintln!("Formulas from: {}", formulas_file_path);

	let formulas_file = std::fs::File::open(&formulas_file_path).unwrap();
	let formulas_buffer = std::io::BufReader::new(formulas_file);
	let formulas : Vec<String> = serde_json::from_reader(formulas_buffer).unwrap();

	let font = FontDescription::default();
	let mut renderer = MathTextRenderer::new(DummyFactory, OutputKind::Raster);
	for formula in formulas.iter() {
		if renderer.render(formula, 100., &font, 0.).is_ok() {
			n_successes += 1;
		}
		n_renders += 1;
	}
	eprintln!("{} / {}", n_successes, n_renders);
	eprintln!("{} distinct formulas cached", renderer.cache().len());
}
