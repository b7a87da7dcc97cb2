use {
    eglinfo::{report::write_report, sys::Egl, Error},
    std::{
        io::{self, Write},
        process,
    },
};

fn run() -> Result<(), Error> {
    let egl = Egl::load()?;
    log::debug!("{egl:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &egl)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    match run() {
        Ok(()) => (),
        Err(e) if e.is_broken_pipe() => (),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
