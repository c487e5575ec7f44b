mod arithmetic;
mod format;
mod now;
