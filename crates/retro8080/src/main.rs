use std::path::PathBuf;

use retro8080::RunnerConfig;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        eprintln!(
            "No ROM path provided.\n\
             Usage: retro8080 <rom> [frames]\n\
             For example: retro8080 assets/roms/space_invaders/space-invaders.rom 120"
        );
        std::process::exit(1);
    };

    let mut config = RunnerConfig::default();
    if let Some(frames) = args.next() {
        match frames.parse() {
            Ok(frames) => config.frames = frames,
            Err(_) => {
                eprintln!("Invalid frame count '{}'", frames);
                std::process::exit(1);
            }
        }
    }

    log::info!("Playing ROM path: '{}'", rom_path.display());
    match retro8080::run(&config, &rom_path) {
        Ok(machine) => {
            machine.cpu().print_registers();
            machine.cpu().print_flags();
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
