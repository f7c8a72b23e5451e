use sdl2::mixer::{InitFlag as MixerInitFlag, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS};
use sdl2::pixels::Color;
use sdl2::AudioSubsystem;
use std::time::Duration;

mod assets;
mod config;
mod game;
mod input;
mod render;
mod screen;
#[cfg(test)]
mod testing;
mod text;

use assets::DiceTextures;
use config::GameConfig;
use game::{CuePlayer, GameLogic, SilentCues, SoundBoard};
use input::InputEvent;
use render::{SdlSurface, Surface};
use screen::{GameOverScreen, GameScreen, ScreenId, ScreenManager, WelcomeScreen};

/// Keeps the audio subsystem and mixer alive while sounds can play
struct AudioDevice {
    _audio: AudioSubsystem,
    _mixer: Sdl2MixerContext,
}

/// Opens the default audio device through SDL2_mixer
fn open_audio(sdl_context: &sdl2::Sdl) -> Result<AudioDevice, String> {
    let audio = sdl_context.audio()?;
    sdl2::mixer::open_audio(44_100, AUDIO_S16LSB, DEFAULT_CHANNELS, 1_024)?;
    let mixer = sdl2::mixer::init(MixerInitFlag::MP3)?;
    sdl2::mixer::allocate_channels(4);
    Ok(AudioDevice {
        _audio: audio,
        _mixer: mixer,
    })
}

/// Picks the cue player, falling back to silence when there is no audio device
fn load_cues(sdl_context: &sdl2::Sdl, config: &GameConfig) -> (Box<dyn CuePlayer>, Option<AudioDevice>) {
    match open_audio(sdl_context) {
        Ok(device) => (Box::new(SoundBoard::load(config)), Some(device)),
        Err(e) => {
            log::warn!("Audio unavailable, playing without sound: {}", e);
            (Box::new(SilentCues), None)
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GameConfig::load();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window_title, config.width, config.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(config.width, config.height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let dice_textures = DiceTextures::load(&texture_creator, &config);

    // Device must outlive the cue player, which is dropped with the screens
    let (cues, _audio_device) = load_cues(&sdl_context, &config);

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Dice seed: {} (set \"seed\" in the config to replay)", seed);
    let logic = GameLogic::new(seed, cues);

    let mut screens = ScreenManager::new();
    screens.register_screen(ScreenId::Welcome, Box::new(WelcomeScreen::new(&config)));
    screens.register_screen(ScreenId::Game, Box::new(GameScreen::new(logic, &config)));
    screens.register_screen(ScreenId::GameOver, Box::new(GameOverScreen));
    screens.navigate(ScreenId::Welcome)?;

    log::info!("Controls:");
    log::info!("  Space     - Start");
    log::info!("  0-9       - Type your answer");
    log::info!("  Backspace - Delete a digit");
    log::info!("  Enter     - Submit");
    log::info!("  ESC       - Quit");

    let mut event_pump = sdl_context.event_pump()?;
    let frame_time = Duration::from_secs(1) / config.target_fps;
    let background: Color = config.background.into();

    'running: loop {
        for event in input::poll_events(&mut event_pump) {
            match event {
                InputEvent::Quit => break 'running,
                InputEvent::Key(key) => {
                    if let Err(e) = screens.handle_key(key) {
                        log::error!("{}", e);
                    }
                }
            }
        }

        let mut surface = SdlSurface::new(&mut canvas, &dice_textures);
        surface.clear(background);
        screens.draw(&mut surface)?;
        canvas.present();

        std::thread::sleep(frame_time);
    }

    log::info!("Goodbye!");
    Ok(())
}
