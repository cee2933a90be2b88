mod beam_setup;
mod logger;
