fn main() {
    // Build scripts run on the host, so the target comes from cargo's env.
    // ESP-IDF only needs to be set up for espidf targets (Xtensa and RISC-V).
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
