#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use assert_fs::TempDir;
    use predicates::prelude::*;

    fn quadrat() -> Command {
        Command::cargo_bin("quadrat").unwrap()
    }

    #[test]
    fn missing_arguments_exit_1() {
        quadrat().assert().code(1);

        let temp = TempDir::new().unwrap();
        quadrat().arg(temp.path()).assert().code(1);
    }

    #[test]
    fn invalid_mode_exits_2_with_message_on_stdout() {
        let temp = TempDir::new().unwrap();

        quadrat()
            .arg(temp.path())
            .arg(temp.path().join("out"))
            .arg("stretch")
            .assert()
            .code(2)
            .stdout(predicate::str::contains(
                "Ungültiger --mode. Erlaubt: fit | cover",
            ));
    }

    #[test]
    fn missing_input_dir_exits_1_with_message_on_stdout() {
        let temp = TempDir::new().unwrap();

        quadrat()
            .arg(temp.path().join("missing"))
            .arg(temp.path().join("out"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Eingabeordner nicht gefunden"));
    }

    #[test]
    fn empty_input_dir_exits_0_with_message() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        std::fs::create_dir(&input).unwrap();

        quadrat()
            .arg(&input)
            .arg(temp.path().join("out"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Keine unterstützten Bilddateien im Eingabeordner gefunden.",
            ));
    }

    #[test]
    fn per_file_failure_still_exits_0() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("broken.jpg"), b"not a jpeg").unwrap();

        quadrat()
            .arg(&input)
            .arg(temp.path().join("out"))
            .assert()
            .success()
            .stdout(predicate::str::contains("FEHLER bei"));
    }
}
