use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn nixtrobed() -> Command {
    let mut cmd = Command::cargo_bin("nixtrobed").unwrap();
    cmd.env_remove("NIXTROBED_TESTBED")
        .env_remove("NIXTROBED_VAGRANT")
        .env_remove("RUST_LOG");
    cmd
}

/// Initialized testbed with the given distros enabled.
fn testbed(distros: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let bed = dir.path().join("bed");
    nixtrobed().arg("init").arg(&bed).assert().success();
    fs::write(bed.join("nixtrobed.distros"), distros).unwrap();
    (dir, bed)
}

/// Shell script standing in for vagrant; appends its arguments to vagrant.log
/// in its working directory and exits with $FAKE_VAGRANT_EXIT.
#[cfg(unix)]
fn fake_vagrant(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-vagrant");
    fs::write(
        &path,
        "#!/bin/sh\necho \"$@\" >> vagrant.log\nexit ${FAKE_VAGRANT_EXIT:-0}\n",
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn calls(bed: &Path) -> Vec<String> {
    fs::read_to_string(bed.join("vagrant.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn init_creates_testbed() {
    let dir = tempdir().unwrap();
    let bed = dir.path().join("bed");

    nixtrobed()
        .arg("init")
        .arg(&bed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Testbed created"));

    assert!(bed.join("Vagrantfile.jinja").is_file());
    assert!(bed.join("nixtrobed.distros").is_file());
    assert!(bed.join("provisioning/ansible.cfg").is_file());
    assert!(bed.join("provisioning/roles").is_dir());
    assert!(bed.join("provisioning/playbooks/default.yml").is_file());
    assert!(!bed.join("Vagrantfile").exists());
}

#[test]
fn init_refuses_existing_directory() {
    let dir = tempdir().unwrap();

    nixtrobed()
        .arg("init")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn lifecycle_outside_testbed_is_not_found() {
    let dir = tempdir().unwrap();

    for command in ["provision", "start", "stop", "list"] {
        nixtrobed()
            .arg("-C")
            .arg(dir.path())
            .arg(command)
            .assert()
            .code(4)
            .stderr(predicate::str::contains("Are you in a nixtrobed directory?"));
    }
}

#[test]
fn missing_vagrant_fails_every_lifecycle_command() {
    let (dir, bed) = testbed("ubuntu\n");
    let missing = dir.path().join("no-such-vagrant");

    for command in ["provision", "start", "stop"] {
        nixtrobed()
            .arg("-C")
            .arg(&bed)
            .arg("--vagrant")
            .arg(&missing)
            .arg(command)
            .assert()
            .code(127)
            .stderr(predicate::str::contains("not found"));
    }
}

#[test]
fn list_prints_registry_as_json() {
    let (_dir, bed) = testbed("ubuntu2204\ncustom,generic/arch,arch.yml\n");

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""box": "ubuntu/jammy64""#))
        .stdout(predicate::str::contains(r#""playbook": "arch.yml""#));
}

#[test]
fn unknown_distro_is_rejected_before_vagrant_runs() {
    let (dir, bed) = testbed("ubuntu\nfedora\n");

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(dir.path().join("no-such-vagrant"))
        .args(["provision", "arch"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("unknown distro 'arch'"));
}

#[cfg(unix)]
#[test]
fn provision_without_arguments_passes_whole_registry() {
    let (dir, bed) = testbed("ubuntu\nfedora\n");
    let vagrant = fake_vagrant(dir.path());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(&vagrant)
        .arg("provision")
        .assert()
        .success();

    assert_eq!(calls(&bed), vec!["provision ubuntu fedora"]);
}

#[cfg(unix)]
#[test]
fn provision_with_subset_passes_only_subset() {
    let (dir, bed) = testbed("ubuntu\nfedora\n");
    let vagrant = fake_vagrant(dir.path());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(&vagrant)
        .args(["provision", "fedora"])
        .assert()
        .success();

    assert_eq!(calls(&bed), vec!["provision fedora"]);
}

#[cfg(unix)]
#[test]
fn start_renders_vagrantfile_and_stop_does_not() {
    let (dir, bed) = testbed("ubuntu2204\n");
    let vagrant = fake_vagrant(dir.path());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .env("NIXTROBED_VAGRANT", &vagrant)
        .args(["stop", "all"])
        .assert()
        .success();
    assert!(!bed.join("Vagrantfile").exists());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .env("NIXTROBED_VAGRANT", &vagrant)
        .arg("start")
        .assert()
        .success();

    let vagrantfile = fs::read_to_string(bed.join("Vagrantfile")).unwrap();
    assert!(vagrantfile.contains(r#"ubuntu2204.vm.box = "ubuntu/jammy64""#));
    assert_eq!(calls(&bed), vec!["halt ubuntu2204", "up ubuntu2204"]);
}

#[cfg(unix)]
#[test]
fn vagrant_exit_code_is_propagated() {
    let (dir, bed) = testbed("ubuntu\n");
    let vagrant = fake_vagrant(dir.path());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(&vagrant)
        .env("FAKE_VAGRANT_EXIT", "5")
        .arg("start")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("See above for details"));
}

#[cfg(unix)]
#[test]
fn stop_reaches_machines_removed_from_registry() {
    let (dir, bed) = testbed("ubuntu\nfedora\n");
    let vagrant = fake_vagrant(dir.path());

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(&vagrant)
        .arg("start")
        .assert()
        .success();

    fs::write(bed.join("nixtrobed.distros"), "ubuntu\n").unwrap();

    nixtrobed()
        .arg("-C")
        .arg(&bed)
        .arg("--vagrant")
        .arg(&vagrant)
        .args(["stop", "fedora"])
        .assert()
        .success();

    assert_eq!(calls(&bed), vec!["up ubuntu fedora", "halt fedora"]);
}

#[cfg(unix)]
#[test]
fn empty_selection_runs_nothing() {
    let (dir, bed) = testbed("# nothing enabled\n");
    let vagrant = fake_vagrant(dir.path());

    for command in ["provision", "start", "stop"] {
        nixtrobed()
            .arg("-C")
            .arg(&bed)
            .arg("--vagrant")
            .arg(&vagrant)
            .arg(command)
            .assert()
            .success()
            .stdout(predicate::str::contains("nothing to do"));
    }

    assert!(calls(&bed).is_empty());
}

#[cfg(unix)]
#[test]
fn relative_vagrant_path_resolves_from_invocation_directory() {
    let (dir, bed) = testbed("ubuntu\n");
    fake_vagrant(dir.path());

    nixtrobed()
        .current_dir(dir.path())
        .args(["-C", "bed", "--vagrant", "./fake-vagrant", "stop"])
        .assert()
        .success();

    assert_eq!(calls(&bed), vec!["halt ubuntu"]);
}
