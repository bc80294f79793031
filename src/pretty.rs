macro_rules! print_cmd_error {
    ($tt:tt, $($tts:tt)+) => {
        eprintln!("{} {}", colored::Colorize::bold(colored::Colorize::red("[ERROR]")), $tt);
        eprintln!("{}", core::format_args!($($tts)*));
    }
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        eprintln!("{} {}", colored::Colorize::bold(colored::Colorize::yellow("[INFO]")), $tt);
        eprintln!("{}", core::format_args!($($tts)*));
    }
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
