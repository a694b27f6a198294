// Example: drive the controller through a scroll and print what a canvas would receive.
use wordphabet::first_letter_uppercase;
use wordphabet_adapter::{
    BaselineTextRenderer, Controller, FilledRectRenderer, HeaderRenderer, RecordingCanvas,
};

const WORDS: &[&str] = &[
    "acorn", "anchor", "apple", "arch", "banana", "beacon", "bison", "cherry", "citrus", "comet",
    "delta", "dune", "ember", "echo",
];

fn main() {
    // Text headers in the left margin, baseline offsets.
    let mut text = BaselineTextRenderer::new(16.0);
    let mut c = Controller::new(WORDS, first_letter_uppercase, |_| 28, text.metrics(24.0, 6.0));
    c.on_viewport_height(112);

    let mut canvas = RecordingCanvas::new();
    for scroll in (0..=200).step_by(40) {
        c.on_scroll(scroll);
        canvas.clear();
        let drawn = c.render(&mut text, &mut canvas);
        println!(
            "text scroll={scroll:>3} section={:?} drawn={drawn} {:?}",
            c.current_section(),
            canvas.commands()
        );
    }

    // Full-width bands drawn in space reserved above each section start.
    let mut bands = FilledRectRenderer::new(320.0, 20.0);
    let mut c = Controller::new(WORDS, first_letter_uppercase, |_| 28, bands.metrics(20.0, 0.0));
    c.reserve_header_space(20);
    c.on_viewport_height(112);

    for label in ["B", "D"] {
        let offset = c.scroll_to_section(label);
        canvas.clear();
        c.render(&mut bands, &mut canvas);
        println!("bands to={label} offset={offset:?} {:?}", canvas.commands());
    }
}
