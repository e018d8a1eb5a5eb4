use apihash::{hash, module_hash, Result, DEFAULT_BITS};

fn print_hash(value: u32, name: &str) {
    println!("[+] 0x{:08X} = {}", value, name);
}

fn main() -> Result<()> {
    print_hash(module_hash("kernel32.dll", DEFAULT_BITS)?, "kernel32.dll");
    print_hash(hash("LoadLibraryW", DEFAULT_BITS)?, "LoadLibraryW");
    print_hash(module_hash("ntdll.dll", DEFAULT_BITS)?, "ntdll.dll");
    print_hash(
        hash("LdrRegisterDllNotification", DEFAULT_BITS)?,
        "LdrRegisterDllNotification",
    );
    print_hash(
        hash("LdrUnregisterDllNotification", DEFAULT_BITS)?,
        "LdrUnregisterDllNotification",
    );
    Ok(())
}
