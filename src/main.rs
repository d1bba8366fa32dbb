extern crate rand;
extern crate gfx_core;
extern crate env_logger;
extern crate piston_window;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;

use std::{io, process};

use piston_window::{
    OpenGL,
    PistonWindow,
    WindowSettings,
    TextureSettings,
    Glyphs,
    Event,
    Input,
    Button,
    ButtonArgs,
    ButtonState,
    MouseButton,
    Motion,
    Key,
};

mod common;
mod config;
mod intersect;
mod state;
mod viewport;

use common::{Point, Segment};
use config::ConfigError;
use state::{State, Stage};
use viewport::Viewport;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(-1);
        },
    }
}

#[derive(Debug)]
enum Error {
    Config(ConfigError),
    Piston(PistonError),
}

#[derive(Debug)]
enum PistonError {
    BuildWindow(String),
    DrawText(gfx_core::factory::CombinedError),
}

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 800;

const AXES_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const SEG1_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const SEG2_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const STATUS_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const POINT_SIZE: f64 = 5.;

fn run() -> Result<(), Error> {
    let matches = config::matches_from(std::env::args_os())
        .map_err(Error::Config)?;
    let stdin = io::stdin();
    let config = config::from_matches(&matches, stdin.lock(), io::stdout())
        .map_err(Error::Config)?;
    info!("world bounds: {:?}", config.bounds);

    let opengl = OpenGL::V3_2;
    let mut window: PistonWindow = WindowSettings::new("Segment Intersection", [SCREEN_WIDTH, SCREEN_HEIGHT])
        .exit_on_esc(true)
        .opengl(opengl)
        .build()
        .map_err(PistonError::BuildWindow)
        .map_err(Error::Piston)?;

    let mut font_path = config.assets_dir.clone();
    font_path.push("FiraSans-Regular.ttf");
    let mut glyphs = match Glyphs::new(&font_path, window.factory.clone(), TextureSettings::new()) {
        Ok(glyphs) =>
            Some(glyphs),
        Err(e) => {
            warn!("failed to load font {}: {:?}, status line disabled", font_path.to_string_lossy(), e);
            None
        },
    };

    let mut rng = rand::thread_rng();
    let mut state = State::new(Viewport::new(config.bounds, SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut cursor = None;
    while let Some(event) = window.next() {
        let maybe_result = window.draw_2d(&event, |context, g2d| {
            use piston_window::{clear, text, ellipse, line, Transformed};
            // clear everything
            clear([0.0, 0.0, 0.0, 1.0], g2d);

            // draw axes
            let viewport = state.viewport();
            let bounds = state.bounds();
            let x_axis = viewport.line(&Point::new(bounds.x_min, 0.), &Point::new(bounds.x_max, 0.));
            let y_axis = viewport.line(&Point::new(0., bounds.y_min), &Point::new(0., bounds.y_max));
            line(AXES_COLOR, 1., x_axis, context.transform, g2d);
            line(AXES_COLOR, 1., y_axis, context.transform, g2d);

            // draw segments
            for (i, &Segment { src, dst, }) in state.segments().iter().enumerate() {
                let color = if i == 0 { SEG1_COLOR } else { SEG2_COLOR };
                line(color, 1., viewport.line(&src, &dst), context.transform, g2d);
            }
            // draw points
            for (i, point) in state.points().iter().enumerate() {
                let color = if i < 2 { SEG1_COLOR } else { SEG2_COLOR };
                let [x, y] = viewport.to_screen(point);
                let half = POINT_SIZE / 2.;
                ellipse(color, [x - half, y - half, POINT_SIZE, POINT_SIZE], context.transform, g2d);
            }

            // draw status
            if let Some(ref mut glyphs) = glyphs {
                text::Text::new_color(STATUS_COLOR, 16).draw(
                    &status_line(&state),
                    glyphs,
                    &context.draw_state,
                    context.transform.trans(5.0, 20.0),
                    g2d
                ).map_err(PistonError::DrawText)?;
            }

            Ok(())
        });
        if let Some(result) = maybe_result {
            let () = result.map_err(Error::Piston)?;
        }

        let state_event = match event {
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::Q), state: ButtonState::Release, .. })) =>
                break,
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::R), state: ButtonState::Press, .. })) =>
                Some(state::Event::Randomize),
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::E), state: ButtonState::Press, .. })) |
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::C), state: ButtonState::Press, .. })) =>
                Some(state::Event::Clear),
            Event::Input(Input::Move(Motion::MouseCursor(x, y))) => {
                cursor = Some((x, y));
                None
            },
            Event::Input(Input::Cursor(false)) => {
                cursor = None;
                None
            },
            Event::Input(Input::Button(ButtonArgs { button: Button::Mouse(MouseButton::Left), state: ButtonState::Press, .. })) =>
                cursor.map(|(x, y)| state::Event::PointerPress { x, y, }),
            Event::Input(Input::Resize(width, height)) =>
                Some(state::Event::Resize { width, height, }),
            _ =>
                None,
        };
        if let Some(state_event) = state_event {
            state.handle_event(state_event, &mut rng);
        }
    }

    Ok(())
}

fn status_line(state: &State) -> String {
    let help = "<click> add point, <R> randomize, <E> clear or <Q> exit";
    match state.stage() {
        Stage::Empty =>
            format!("[ segment 1: 0/2 ] {}", help),
        Stage::Seg1Partial =>
            format!("[ segment 1: 1/2 ] {}", help),
        Stage::Seg1Complete =>
            format!("[ segment 2: 0/2 ] {}", help),
        Stage::Seg2Partial =>
            format!("[ segment 2: 1/2 ] {}", help),
        Stage::Seg2Complete if state.intersected() =>
            "[ segments intersect ] <E> clear or <Q> exit".to_string(),
        Stage::Seg2Complete =>
            "[ segments do not intersect ] <E> clear or <Q> exit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use common::{Point, Bounds};
    use viewport::Viewport;
    use state::State;
    use super::status_line;

    #[test]
    fn status_follows_state() {
        let bounds = Bounds { x_min: -1., x_max: 1., y_min: -1., y_max: 1., };
        let mut state = State::new(Viewport::new(bounds, 800, 800));
        assert!(status_line(&state).starts_with("[ segment 1: 0/2 ]"));
        for &(x, y) in &[(-1., -1.), (1., 1.), (-1., 1.)] {
            state.add_point(Point::new(x, y));
        }
        assert!(status_line(&state).starts_with("[ segment 2: 1/2 ]"));
        state.add_point(Point::new(1., -1.));
        assert!(status_line(&state).starts_with("[ segments intersect ]"));
        state.clear();
        for &(x, y) in &[(-1., -1.), (1., -1.), (-1., 1.), (1., 1.)] {
            state.add_point(Point::new(x, y));
        }
        assert!(status_line(&state).starts_with("[ segments do not intersect ]"));
    }
}
