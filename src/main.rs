use brushfill::display::{Screen, Viewer, ViewerEvent};
use brushfill::{BrushSize, Framebuffer, PaintSession, Sketch, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use sdl2::keyboard::Keycode;

struct Options {
    width: u32,
    height: u32,
    scale: u32,
    vsync: bool,
    sketch_path: String,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        scale: 2,
        vsync: true,
        sketch_path: "sketch.json".to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => opts.vsync = false,
            "--width" | "-w" => {
                if let Some(w) = value.and_then(|v| v.parse::<u32>().ok()) {
                    opts.width = w;
                }
                i += 1;
            },
            "--height" | "-h" => {
                if let Some(h) = value.and_then(|v| v.parse::<u32>().ok()) {
                    opts.height = h;
                }
                i += 1;
            },
            "--resolution" | "-r" => {
                // WxH, e.g. 256x384
                if let Some((w, h)) = value.and_then(|v| v.split_once('x')) {
                    if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                        opts.width = w;
                        opts.height = h;
                    }
                }
                i += 1;
            },
            "--scale" | "-s" => {
                if let Some(s) = value.and_then(|v| v.parse::<u32>().ok()) {
                    opts.scale = s.max(1);
                }
                i += 1;
            },
            "--sketch" => {
                if let Some(path) = value {
                    opts.sketch_path = path.clone();
                }
                i += 1;
            },
            "--help" => {
                println!("Usage: paint [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W           Canvas width (default: {})", DEFAULT_WIDTH);
                println!("  --height H, -h H          Canvas height (default: {})", DEFAULT_HEIGHT);
                println!("  --resolution WxH, -r WxH  Canvas size (e.g., 256x384)");
                println!("  --scale N, -s N           Window pixels per canvas pixel (default: 2)");
                println!("  --sketch PATH             Sketch file for S/L (default: sketch.json)");
                println!("  --no-vsync                Disable VSync");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    opts
}

fn main() -> Result<(), String> {
    let opts = parse_args();

    let (mut viewer, texture_creator) =
        Viewer::open("paint", opts.width, opts.height, opts.scale, opts.vsync)?;
    let mut screen = Screen::new(&texture_creator, opts.width, opts.height)?;

    let mut sketch = Sketch::new("untitled", opts.width, opts.height);
    let mut canvas = Framebuffer::filled(opts.width, opts.height, sketch.background);
    let mut session = PaintSession::new();

    println!("=== paint ===");
    println!("Canvas: {}x{} (x{} window scale)", opts.width, opts.height, opts.scale);
    println!("Controls:");
    println!("  Left drag   - Paint");
    println!("  1 / 2 / 3   - Large / medium / small brush");
    println!("  Left/Right  - Previous / next hue");
    println!("  Up/Down     - Lighter / darker");
    println!("  C           - Clear canvas");
    println!("  S           - Save sketch to {}", opts.sketch_path);
    println!("  L           - Load sketch from {}", opts.sketch_path);
    println!("  Escape      - Quit");

    'main: loop {
        for event in viewer.poll_events() {
            match event {
                ViewerEvent::Quit => break 'main,
                ViewerEvent::Key(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Num1 | Keycode::Num2 | Keycode::Num3 => {
                        let slot = match key {
                            Keycode::Num1 => 0,
                            Keycode::Num2 => 1,
                            _ => 2,
                        };
                        if let Some(brush) = BrushSize::from_index(slot) {
                            session.select_brush(brush);
                            println!("Brush: {:?} ({}px)", brush, brush.width());
                        }
                    },
                    Keycode::Left => session.shift_palette(-1, 0),
                    Keycode::Right => session.shift_palette(1, 0),
                    Keycode::Up => session.shift_palette(0, 1),
                    Keycode::Down => session.shift_palette(0, -1),
                    Keycode::C => {
                        sketch.clear();
                        sketch.render(&mut canvas);
                    },
                    Keycode::S => match sketch.save(&opts.sketch_path) {
                        Ok(()) => println!("Sketch saved to {}", opts.sketch_path),
                        Err(e) => eprintln!("Failed to save: {}", e),
                    },
                    Keycode::L => match Sketch::load(&opts.sketch_path) {
                        Ok(loaded) if loaded.width == opts.width && loaded.height == opts.height => {
                            sketch = loaded;
                            sketch.render(&mut canvas);
                            println!("Sketch loaded from {} ({} ops)", opts.sketch_path, sketch.ops.len());
                        },
                        Ok(loaded) => eprintln!(
                            "Sketch is {}x{}, canvas is {}x{}; not loaded",
                            loaded.width, loaded.height, opts.width, opts.height
                        ),
                        Err(e) => eprintln!("Failed to load: {}", e),
                    },
                    _ => {},
                },
                ViewerEvent::PenDown(uv) => {
                    session.press();
                    if let Some(uv) = uv {
                        sketch.push(session.drag_to(&mut canvas, uv));
                    }
                },
                ViewerEvent::PenDrag(Some(uv)) => sketch.push(session.drag_to(&mut canvas, uv)),
                ViewerEvent::PenDrag(None) | ViewerEvent::PenUp => session.release(),
            }
        }

        viewer.show(&mut screen, &canvas)?;
    }

    Ok(())
}
