#[cfg(test)]
mod registration;
