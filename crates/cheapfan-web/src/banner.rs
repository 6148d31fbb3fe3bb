//! Console banner printed once at boot.

pub const BANNER: &str = "
🎟️ CheapFan.com
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Fandom Is Not for the Rich.
Get in. Get there. Get loud.

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Looking for a job? We're always looking
for passionate fans who can code!

Contact: jobs@cheapfan.com
";
