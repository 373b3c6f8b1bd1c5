#![allow(dead_code)]
// Each test binary only uses some of these

pub const TOKEN_RESPONSE: &str = r#"
{
    "token": "eyJhbGciOiJIUzI1NiJ9.stub",
    "expires": "2026-10-19T12:30:00.000Z"
}
"#;

pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.stub";

pub const INVENTORY_TWO_MACS: &str = r#"
{
    "totalCount": 2,
    "results": [
        {
            "id": "1",
            "udid": "6B4C1F9E-0000-4000-8000-000000000001",
            "general": {
                "name": "studio-mac",
                "lastIpAddress": "10.0.0.12",
                "jamfBinaryVersion": "11.9.0-t1725546430",
                "platform": "Mac",
                "mdmCapable": {"capable": true, "capableUsers": ["admin"]},
                "lastContactTime": "2026-10-18T21:14:09.012Z",
                "assetTag": null
            },
            "diskEncryption": {
                "bootPartitionEncryptionDetails": {"partitionName": "Macintosh HD", "partitionFileVault2State": "ENCRYPTED"},
                "fileVault2Enabled": true
            },
            "localUserAccounts": [
                {"uid": "501", "username": "admin", "admin": true}
            ],
            "hardware": {"model": "Mac Studio", "processorCount": 1, "totalRamMegabytes": 65536},
            "operatingSystem": {"name": "macOS", "version": "15.0.1", "build": "24A348"},
            "softwareUpdates": []
        },
        {
            "id": "2",
            "udid": "6B4C1F9E-0000-4000-8000-000000000002",
            "general": {
                "name": "loaner-01",
                "lastIpAddress": null,
                "jamfBinaryVersion": "11.8.1-t1723055450",
                "platform": "Mac",
                "mdmCapable": {"capable": false, "capableUsers": []},
                "lastContactTime": "2026-09-30T08:00:00.000Z",
                "assetTag": "L-01"
            },
            "diskEncryption": {"fileVault2Enabled": false},
            "localUserAccounts": [],
            "hardware": {"model": "MacBook Air", "processorCount": 1, "totalRamMegabytes": 8192},
            "operatingSystem": {"name": "macOS", "version": "14.6", "build": "23G80"},
            "softwareUpdates": [{"name": "macOS Sequoia", "version": "15.0.1"}]
        }
    ]
}
"#;
