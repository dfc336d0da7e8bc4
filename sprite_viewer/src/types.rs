/// CPU whose video unit the sprites are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuType {
    Snes,
    Spc,
    NecDsp,
    Sa1,
    Gsu,
    Cx4,
    Gameboy,
    Nes,
    Pce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleType {
    Snes,
    Gameboy,
    Nes,
    PcEngine,
}

impl ConsoleType {
    /// Number of entries in the console's sprite attribute table
    pub fn max_sprite_count(&self) -> usize {
        match self {
            ConsoleType::Snes => 128,
            ConsoleType::Gameboy => 40,
            ConsoleType::Nes => 64,
            ConsoleType::PcEngine => 64,
        }
    }
}
