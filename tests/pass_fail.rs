extern crate mathtext;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;

mod common;

use std::fs::File;
use std::io::BufReader;

use mathtext::font::FontDescription;
use mathtext::render::OutputKind;
use mathtext::render::driver::MathTextRenderer;

use common::{init_logging, providers};

#[derive(Debug, Serialize, Deserialize)]
struct Tests {
    #[serde(rename="Pass")]
    pass: Vec<String>,
    #[serde(rename="Fail")]
    fail: Vec<String>,
}

#[test]
fn pass_fail() {
    init_logging();
    let file = File::open("tests/data/passfail.yaml").expect("failed to open passfail yaml");
    let reader = BufReader::new(file);
    let tests: Tests = serde_yaml::from_reader(reader).expect("failed to parse passfail.yaml");
    let mut fail = 0;

    let font = FontDescription::default();
    for output in [OutputKind::Raster, OutputKind::PostScript, OutputKind::Svg, OutputKind::Pdf] {
        let mut renderer = MathTextRenderer::new(providers(), output);

        for test in tests.pass.iter() {
            match renderer.render(test, 100., &font, 0.) {
                Ok(rendered) if rendered.payload.kind() == output => continue,
                Ok(rendered) => {
                    println!("Tex: {}", test);
                    println!("Rendered to {} instead of {}", rendered.payload.kind(), output);
                    fail += 1;
                },
                Err(err) => {
                    println!("Tex: {}", test);
                    println!("Should have passed, failed with: {}", err);
                    fail += 1;
                }
            }
        }

        for test in tests.fail.iter() {
            match renderer.render(test, 100., &font, 0.) {
                Err(_) => continue,
                Ok(_) => {
                    println!("Tex: {}", test);
                    println!("Should have failed");
                    fail += 1;
                }
            }
        }
        assert_eq!(renderer.cache().len(), tests.pass.len());
    }

    if fail > 0 {
        panic!("{} Pass/Fail tests failed.", fail);
    }
}
