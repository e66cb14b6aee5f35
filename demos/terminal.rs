use grid_search_viz::cancel::CancelToken;
use grid_search_viz::cell::CellState;
use grid_search_viz::config::GridConfig;
use grid_search_viz::editor::{Editor, PaintMode};
use grid_search_viz::solver::Algorithm;
use grid_search_viz::{MIN_DIMENSION, NO_PATH_HOLD};
use grid_util::point::Point;

// In this example every algorithm is run on a 20x20 grid with a wall that has a single gap
//
// S marks the start, E the end, # barriers, o the frontier, x visited cells and * the path.
// Passing a number of frames as first argument stops each search after that many frames.

fn main() {
    let frame_limit = std::env::args().nth(1).and_then(|a| a.parse::<usize>().ok());
    let config = GridConfig::new(MIN_DIMENSION, 400).expect("valid configuration");
    let mut editor = Editor::new(config);

    editor.mode = PaintMode::Start;
    editor.click(Point::new(2, 2));
    editor.mode = PaintMode::End;
    editor.click(Point::new(17, 17));
    editor.mode = PaintMode::Barrier;
    for i in 0..MIN_DIMENSION as i32 {
        if i != 15 {
            editor.drag(Point::new(i, 9));
        }
    }

    for algorithm in Algorithm::ALL {
        editor.algorithm = algorithm;
        let token = CancelToken::new();
        let quit = token.clone();
        let mut frames = 0;
        let result = editor.run(token.guard(|_| {
            frames += 1;
            if frame_limit.is_some_and(|limit| frames >= limit) {
                quit.cancel();
            }
        }));
        println!("{algorithm} after {frames} frames:");
        print!("{}", editor.grid());
        match result {
            Ok(true) => println!(
                "Path with {} steps\n",
                editor.grid().count(CellState::Path) + 1
            ),
            Ok(false) => {
                println!("No Path Found!");
                std::thread::sleep(NO_PATH_HOLD);
            }
            Err(e) => println!("{e}\n"),
        }
    }
}
