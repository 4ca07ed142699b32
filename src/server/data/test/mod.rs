mod planet;
mod user;
