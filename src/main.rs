use std::{
    fmt::{Debug, Display},
    fs::File,
    io::Write,
    path::PathBuf,
    process::exit,
};

use clap::{Parser, Subcommand};
use gbcore::{Emulator, Frontend};

/// A headless front end with no display or audio device: it persists
/// external RAM to a side file and stops after a fixed number of polls
/// (roughly 10ms of emulated time each). Meant for smoke-testing a ROM
/// and for `main.rs`'s CLI; a real front end provides its own window,
/// audio device, and gamepad polling by implementing `Frontend` itself.
struct Headless {
    ram: Vec<u8>,
    polls_left: Option<u64>,
}

impl Frontend for Headless {
    fn warning(&mut self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn get_external_ram(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    fn update_screen(&mut self, _framebuffer: &[u16; 160 * 144]) {}

    fn check(&mut self) -> (bool, u8, u8) {
        let stop = match &mut self.polls_left {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        };
        (stop, 0, 0)
    }

    fn play_sound(&mut self, _left: &[f32; gbcore::BUFFER_SIZE], _right: &[f32; gbcore::BUFFER_SIZE]) {}
}

#[derive(Parser)]
#[command(name = "gbcore", about = "Cycle-accurate 8-bit handheld console core")]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a ROM and run it headlessly for a number of emulated polls.
    #[command(arg_required_else_help = true)]
    Run {
        /// ROM file
        rom_file: PathBuf,
        /// Stop after this many ~10ms front-end polls; runs forever if absent
        #[arg(long)]
        polls: Option<u64>,
        /// Save the session into a save file on exit
        #[arg(long, value_name = "SAVE_FILE")]
        save_to: Option<PathBuf>,
    },

    /// Resume a previously saved session.
    Resume {
        /// Saved file
        save_file: PathBuf,
        /// Stop after this many ~10ms front-end polls; runs forever if absent
        #[arg(long)]
        polls: Option<u64>,
        /// Do not save the new state back into the current save file
        #[arg(long, conflicts_with = "save_to")]
        no_save: bool,
        /// Save the new state into the given file instead
        #[arg(long, value_name = "SAVE_FILE", conflicts_with = "no_save")]
        save_to: Option<PathBuf>,
    },

    /// Extract the ROM image out of a save file.
    ExtractRom {
        /// Saved file
        save_file: PathBuf,
        /// New ROM file
        rom_file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.commands {
        Commands::Run {
            rom_file,
            polls,
            save_to,
        } => {
            let rom = read_or_exit(&rom_file, "ROM file");
            let frontend = Headless {
                ram: Vec::new(),
                polls_left: polls,
            };
            let mut emu = match Emulator::new(&rom, None, frontend) {
                Ok(emu) => emu,
                Err(e) => err_exit("Failed to initialize emulator", e),
            };
            emu.run();
            finish(emu, save_to);
        }

        Commands::Resume {
            save_file,
            polls,
            no_save,
            save_to,
        } => {
            let data = read_or_exit(&save_file, "save file");
            let save_to = if no_save {
                None
            } else {
                Some(save_to.unwrap_or_else(|| save_file.clone()))
            };
            let frontend = Headless {
                ram: Vec::new(),
                polls_left: polls,
            };
            let mut emu = Emulator::from_save_state(&data, frontend);
            emu.run();
            finish(emu, save_to);
        }

        Commands::ExtractRom {
            save_file,
            rom_file,
        } => {
            let data = read_or_exit(&save_file, "save file");
            match Emulator::<Headless>::rom_from_save_state(&data) {
                Ok(rom) => {
                    write_or_exit(&rom_file, "ROM file", &rom);
                    eprintln!("ROM extracted to file {rom_file:?}.");
                }
                Err(e) => err_exit("Decoding save file failed", e),
            }
        }
    }

    eprintln!("Quit.");
}

fn finish(emu: Emulator<Headless>, save_to: Option<PathBuf>) {
    if let Some(path) = save_to {
        let state = emu.save_state();
        write_or_exit(&path, "save file", &state);
        eprintln!("Session saved to file {path:?}.");
    }
}

fn read_or_exit(path: &PathBuf, err_name: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(ret) => ret,
        Err(e) => err_exit(
            format!("Cannot open {err_name} {path:?} for reading"),
            e.kind(),
        ),
    }
}

fn write_or_exit(path: &PathBuf, err_name: &str, data: &[u8]) {
    match File::create(path) {
        Ok(mut f) => {
            if let Err(e) = f.write_all(data) {
                err_exit(format!("Write to {err_name} {path:?} failed"), e.kind());
            }
        }
        Err(e) => {
            err_exit(
                format!("Cannot open {err_name} {path:?} for writing"),
                e.kind(),
            );
        }
    }
}

fn err_exit<M: Display, E: Debug>(msg: M, err: E) -> ! {
    eprintln!("{msg}.");
    eprintln!("Error: {err:?}.");
    exit(1);
}
